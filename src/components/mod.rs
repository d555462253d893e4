pub mod dm_list_view;
pub mod nav_bar;
