use orbit_core::command::Request;
use orbit_core::timer::Timer;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Command(Request),
    Timer(Timer),
    ConfigReload,
}
