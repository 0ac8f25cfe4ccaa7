mod session_rng;

pub mod rps;

pub use session_rng::SessionRng;
