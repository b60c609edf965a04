fn main() {
    // ESP-IDF toolchain environment is only needed for device builds;
    // host test runs use `--no-default-features`.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
