pub mod beep_boop;
pub mod smoothie;
