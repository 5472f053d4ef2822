pub(crate) fn run() -> anyhow::Result<()> {
    let report = ohana_engine::run_self_test();
    for check in report.checks() {
        println!("{check}");
    }
    if !report.passed() {
        anyhow::bail!(
            "{} of {} self-test checks failed",
            report.failed_count(),
            report.checks().len()
        );
    }
    println!("all {} checks passed", report.checks().len());
    Ok(())
}
