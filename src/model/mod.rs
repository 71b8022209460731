pub mod evidence;
pub mod tick;
