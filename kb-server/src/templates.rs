//! Embedded admin page templates.
//!
//! Sources are compiled into the binary, so the server ships as a single
//! file with no template directory to deploy.

use minijinja::Environment;

/// Build the template environment with every admin page registered.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();

    env.add_template("layout.html", include_str!("../templates/layout.html"))?;
    env.add_template("dashboard.html", include_str!("../templates/dashboard.html"))?;
    env.add_template("knowledge.html", include_str!("../templates/knowledge.html"))?;
    env.add_template("testing.html", include_str!("../templates/testing.html"))?;
    env.add_template("models.html", include_str!("../templates/models.html"))?;
    env.add_template(
        "announcement.html",
        include_str!("../templates/announcement.html"),
    )?;
    env.add_template("api_docs.html", include_str!("../templates/api_docs.html"))?;
    env.add_template("settings.html", include_str!("../templates/settings.html"))?;

    Ok(env)
}
