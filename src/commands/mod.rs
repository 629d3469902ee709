pub mod check;
pub mod dispatch;
pub mod exec;
pub mod output;
pub mod run;
