pub mod chart;
pub mod io;
pub mod stats;
