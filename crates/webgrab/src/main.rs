fn main() -> anyhow::Result<()> {
    let code = webgrab::run()?;
    std::process::exit(code)
}
