pub mod sticks;
