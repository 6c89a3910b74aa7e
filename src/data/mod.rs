pub mod directory_view;
