use anyhow::Result;

/// Requests are issued strictly one after another, so a single thread is all the cli needs.
pub fn single_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
