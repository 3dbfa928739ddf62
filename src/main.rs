fn main() -> anyhow::Result<()> {
    weft::logging::init();
    weft::repl::start()
}
