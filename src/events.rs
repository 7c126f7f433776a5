#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    TogglePause,
    Pause,
    Resume,
    Reverse,
    Faster,
    Slower,
    ConfigReload,
    Quit,
}
