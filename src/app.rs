use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use stopwatch_core::{hms, Stopwatch};

use crate::alerts::{self, AlertConfig};
use crate::export;

/// Which target field the editor cursor sits on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TargetField {
    Hours,
    Minutes,
    Seconds,
}

impl TargetField {
    pub fn next(self) -> Self {
        match self {
            TargetField::Hours => TargetField::Minutes,
            TargetField::Minutes => TargetField::Seconds,
            TargetField::Seconds => TargetField::Hours,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            TargetField::Hours => TargetField::Seconds,
            TargetField::Minutes => TargetField::Hours,
            TargetField::Seconds => TargetField::Minutes,
        }
    }
}

/// The three target input fields, kept as two-digit zero-padded strings the
/// way the on-screen inputs hold them. Values are not range-clamped here;
/// the millisecond conversion simply multiplies whatever parses.
#[derive(Clone, Debug)]
pub struct TargetFields {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl TargetFields {
    pub fn new() -> Self {
        Self {
            hours: "00".into(),
            minutes: "00".into(),
            seconds: "00".into(),
        }
    }

    /// Parse an "HH:MM:SS" argument. Each part must be 1-2 digits.
    pub fn from_hms(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        let [h, m, sec] = parts.as_slice() else {
            return None;
        };
        for part in [h, m, sec] {
            if part.is_empty() || part.len() > 2 || !part.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
        }
        Some(Self {
            hours: format!("{:0>2}", h),
            minutes: format!("{:0>2}", m),
            seconds: format!("{:0>2}", sec),
        })
    }

    pub fn target_ms(&self) -> u64 {
        stopwatch_core::target_ms(&self.hours, &self.minutes, &self.seconds)
    }

    fn field_mut(&mut self, field: TargetField) -> &mut String {
        match field {
            TargetField::Hours => &mut self.hours,
            TargetField::Minutes => &mut self.minutes,
            TargetField::Seconds => &mut self.seconds,
        }
    }
}

impl Default for TargetFields {
    fn default() -> Self {
        Self::new()
    }
}

/// All mutable state behind the screen: the engine plus the input-side
/// target fields, editor cursor, and status line.
pub struct App {
    pub watch: Stopwatch,
    pub target: TargetFields,
    /// `Some(field)` while the target editor is open.
    pub editing: Option<TargetField>,
    pub status: Option<String>,
    pub should_quit: bool,
    alert_config: AlertConfig,
    export_dir: PathBuf,
}

impl App {
    pub fn new(target: TargetFields, alert_config: AlertConfig, export_dir: PathBuf) -> Self {
        let mut watch = Stopwatch::new();
        watch.set_target_ms(target.target_ms());
        Self {
            watch,
            target,
            editing: None,
            status: None,
            should_quit: false,
            alert_config,
            export_dir,
        }
    }

    /// One nominal tick from the host scheduler. Fires the alert on the
    /// single tick that crosses the target.
    pub fn on_tick(&mut self, delta_ms: u64) {
        if self.watch.tick(delta_ms) {
            alerts::fire_alert(&self.alert_config);
            self.status = Some(format!("Target {} reached", hms(self.watch.target_ms())));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'))
        {
            self.should_quit = true;
            return;
        }

        if let Some(focus) = self.editing {
            self.handle_target_key(focus, key.code);
            return;
        }

        match key.code {
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'r' => self.reset(),
                's' => self.split(),
                'e' => self.export(),
                't' => self.editing = Some(TargetField::Hours),
                'q' => self.should_quit = true,
                _ => {}
            },
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Target editor keys: digits roll into the focused field and take
    /// effect immediately, Tab/arrows move, Enter/Esc close the editor.
    fn handle_target_key(&mut self, focus: TargetField, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let field = self.target.field_mut(focus);
                let last = field.chars().last().unwrap_or('0');
                *field = format!("{last}{c}");
                self.watch.set_target_ms(self.target.target_ms());
            }
            KeyCode::Tab | KeyCode::Right => self.editing = Some(focus.next()),
            KeyCode::BackTab | KeyCode::Left => self.editing = Some(focus.prev()),
            KeyCode::Enter | KeyCode::Esc => {
                self.editing = None;
                self.status = Some(match self.watch.target_ms() {
                    0 => "No target set".into(),
                    ms => format!("Target {}", hms(ms)),
                });
            }
            _ => {}
        }
    }

    fn toggle(&mut self) {
        self.watch.toggle();
        self.status = None;
    }

    fn reset(&mut self) {
        self.watch.reset();
        self.status = None;
    }

    fn split(&mut self) {
        // Silently ignored while stopped.
        if let Some(split) = self.watch.record_split() {
            self.status = Some(format!("Split {}  {}", split.id, split.lap_label));
        }
    }

    fn export(&mut self) {
        if self.watch.splits().is_empty() {
            self.status = Some("Nothing to export yet".into());
            return;
        }
        match export::export_session(&self.export_dir, self.watch.elapsed_ms(), self.watch.splits())
        {
            Ok(path) => {
                log::info!("session exported to {}", path.display());
                self.status = Some(format!("Exported {}", path.display()));
            }
            Err(e) => {
                log::warn!("export failed: {e:#}");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }
}
