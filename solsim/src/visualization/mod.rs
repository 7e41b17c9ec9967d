pub mod view;
pub mod solsim_vis2d;
