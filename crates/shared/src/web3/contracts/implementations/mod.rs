pub mod diamond_cut_contract;
