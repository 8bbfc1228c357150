pub mod label_trail;
pub mod path_label_queue;
pub mod settled_airports;
