mod play;
mod verify;

pub use play::play;
pub use verify::verify_round;
