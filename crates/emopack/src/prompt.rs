use dialoguer::Password;

use emopack_core::Credential;

const SESSDATA_HELP: &str = "\
How to find your SESSDATA:
  1. Log in at https://www.bilibili.com in a desktop browser.
  2. Open the developer tools (usually F12).
  3. Go to Application (Chrome/Edge) or Storage (Firefox).
  4. Open Cookies -> https://www.bilibili.com.
  5. Copy the value of the cookie named SESSDATA.
SESSDATA is your login session. Do not share it with anyone.";

/// Ask for the SESSDATA cookie without echoing it.
///
/// Empty input is accepted by the prompt itself and rejected by
/// [`Credential::parse`], so the caller sees one error for it.
pub fn prompt_credential() -> eyre::Result<Credential> {
    eprintln!();
    eprintln!("{SESSDATA_HELP}");
    eprintln!();

    let raw = Password::new()
        .with_prompt("Bilibili SESSDATA")
        .allow_empty_password(true)
        .interact()?;

    Ok(Credential::parse(&raw)?)
}
