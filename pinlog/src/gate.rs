//! On/off switch in front of the sink.

use crate::io::sink::Sink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gate {
    #[default]
    On,
    /// Nothing is drawn, composed or written.
    Off,
}

impl Gate {
    /// Compose and write when on. When off, `compose` is never called.
    pub fn emit(self, sink: &dyn Sink, compose: impl FnOnce() -> String) {
        match self {
            Gate::On => sink.write(&compose()),
            Gate::Off => {}
        }
    }

    pub fn is_open(self) -> bool {
        self == Gate::On
    }
}

impl From<bool> for Gate {
    fn from(enabled: bool) -> Self {
        if enabled { Gate::On } else { Gate::Off }
    }
}
