//! Speech-synthesis capability probing

/// Reports whether the host environment can synthesise speech.
///
/// The catalog asks on every query and never caches the answer; any
/// caching is the probe's own business.
pub trait SpeechSynthesisProbe {
    fn supports_speech_synthesis(&self) -> bool;
}

/// A probe with a fixed answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticProbe(pub bool);

impl SpeechSynthesisProbe for StaticProbe {
    fn supports_speech_synthesis(&self) -> bool {
        self.0
    }
}

impl<F> SpeechSynthesisProbe for F
where
    F: Fn() -> bool,
{
    fn supports_speech_synthesis(&self) -> bool {
        self()
    }
}
