// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.

pub mod led_blink;

// Re-export Tasks für einfachen Import
pub use led_blink::led_blink_task;
