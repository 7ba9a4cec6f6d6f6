pub mod replay2d;
