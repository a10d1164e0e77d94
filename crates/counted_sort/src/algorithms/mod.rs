pub mod comb_sort;
pub mod insertion_sort;
pub mod quick_sort;
