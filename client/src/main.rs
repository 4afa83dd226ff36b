fn main() {
    #[cfg(feature = "csr")]
    timeconverter::mount();
}
