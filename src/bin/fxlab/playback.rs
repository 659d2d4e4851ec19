//! Audio playback of a rendered signal

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use rtrb::{Consumer, RingBuffer};
use std::sync::Arc;

/// Capacity of the playhead ring buffer (one entry per audio callback)
const POSITION_QUEUE: usize = 64;

/// A running output stream playing one signal from start to end
pub struct Player {
    /// Kept alive for as long as playback should continue
    _stream: cpal::Stream,
    /// Playhead positions (in source samples) from the audio thread
    position_rx: Consumer<usize>,
    /// Latest playhead position
    position: usize,
    len: usize,
}

impl Player {
    /// Start playing `samples` (recorded at `sample_rate`) on the default device
    pub fn start(samples: Arc<[f32]>, sample_rate: u32) -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let device_rate = config.sample_rate().0 as f64;
        let channels = config.channels() as usize;
        // Nearest-sample rate conversion, good enough for auditioning
        let step = sample_rate as f64 / device_rate;

        let (mut position_tx, position_rx) = RingBuffer::<usize>::new(POSITION_QUEUE);
        let len = samples.len();
        let mut cursor = 0.0f64;

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                for frame in data.chunks_mut(channels) {
                    let sample = samples.get(cursor as usize).copied().unwrap_or(0.0);
                    frame.fill(sample);
                    cursor += step;
                }
                // UI only needs the latest position; drop updates if it lags
                let _ = position_tx.push(cursor as usize);
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )?;

        stream.play()?;

        Ok(Self {
            _stream: stream,
            position_rx,
            position: 0,
            len,
        })
    }

    /// Drain pending playhead updates and return the latest position
    pub fn poll(&mut self) -> usize {
        while let Ok(position) = self.position_rx.pop() {
            self.position = position;
        }
        self.position
    }

    /// Whether the playhead has passed the last sample
    pub fn finished(&self) -> bool {
        self.position >= self.len
    }
}
