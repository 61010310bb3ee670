fn main() -> anyhow::Result<()> {
    app_coordinator::desktop_main()
}
