//! Frequent 1- and 2-itemset counting.

pub mod count;
