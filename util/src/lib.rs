pub mod vec_ops;
