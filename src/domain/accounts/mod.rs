pub mod instructor;
pub mod learner;
