pub mod read_root;
