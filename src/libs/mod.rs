pub mod gff;
pub mod interval;
pub mod io;
pub mod schedule;
