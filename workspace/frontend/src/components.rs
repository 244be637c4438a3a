pub mod emissions;
