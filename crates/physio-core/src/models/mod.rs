pub mod answer;
pub mod consult;
pub mod history;
pub mod intake;
pub mod quality;
pub mod summary;
