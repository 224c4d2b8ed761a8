pub mod access_gate;
pub mod theme;

pub use access_gate::AccessGate;
pub use theme::Theme;
