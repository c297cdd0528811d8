pub mod microcms;
