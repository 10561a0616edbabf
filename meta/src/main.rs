fn main() {
    multiversx_sc_meta_lib::cli_main::<savings_vault::AbiProvider>();
}
