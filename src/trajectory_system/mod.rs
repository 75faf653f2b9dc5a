pub mod kinematics;
pub mod sample;
