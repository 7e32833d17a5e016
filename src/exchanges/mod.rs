pub mod campbx;
