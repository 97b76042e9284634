use std::io::Write;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AlertConfig {
    /// Ring the terminal bell.
    pub bell: bool,
    /// Optional audio clip (wav/ogg/mp3) to play.
    pub sound: Option<PathBuf>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            bell: true,
            sound: None,
        }
    }
}

/// Fire the target alert. Best-effort on every channel: a muted terminal,
/// a missing clip, or a machine without an audio device must not disturb
/// the stopwatch.
pub fn fire_alert(config: &AlertConfig) {
    if config.bell {
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
    if let Some(path) = &config.sound {
        play_clip(path.clone());
    }
}

/// Decode and play the clip on a detached thread so playback never blocks
/// tick processing. Every failure path returns silently.
fn play_clip(path: PathBuf) {
    std::thread::spawn(move || {
        use rodio::{Decoder, OutputStream, Sink};
        use std::fs::File;
        use std::io::BufReader;

        let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
            return;
        };
        let Ok(file) = File::open(&path) else { return };
        let Ok(source) = Decoder::new(BufReader::new(file)) else {
            return;
        };
        let Ok(sink) = Sink::try_new(&stream_handle) else {
            return;
        };

        sink.append(source);
        sink.sleep_until_end();
    });
}
