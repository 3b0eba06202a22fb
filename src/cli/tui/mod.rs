/// Terminal User Interface module for the interactive modes
pub mod wizard;
