// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod config;
pub mod signs; 
pub(crate) mod evaluate; 

// algorithms 
pub mod bisection;
pub mod regula_falsi;
pub mod secant;
pub mod newton;

// dispatch 
pub mod solve; 
