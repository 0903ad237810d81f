use crate::cli::commands::{PrefsAction, PrefsCmd, ProfileAction, ProfileCmd, ProfileSetArgs};
use crate::cli::output::{ProfileJson, format_prefs, format_profile};
use crate::model::prefs::NotificationPrefs;
use crate::model::profile::{UserIdentity, timezone_label};
use crate::ops::settings::{NotificationSettings, ProfileSettings};

use super::{Context, print_json};

/// The configured user. Settings commands need one to key the stored rows.
fn require_user(ctx: &Context) -> Result<&UserIdentity, Box<dyn std::error::Error>> {
    if ctx.config.user.id.trim().is_empty() {
        return Err("no user configured: set [user] id in roster.toml".into());
    }
    Ok(&ctx.config.user)
}

fn print_prefs(prefs: &NotificationPrefs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        return print_json(prefs);
    }
    for line in format_prefs(prefs) {
        println!("{}", line);
    }
    Ok(())
}

pub(super) fn cmd_prefs(
    ctx: &Context,
    args: PrefsCmd,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = require_user(ctx)?;
    let mut settings = NotificationSettings::load(&ctx.store, user)?;

    match args.action.unwrap_or(PrefsAction::Show) {
        PrefsAction::Show => return print_prefs(settings.prefs(), json),
        PrefsAction::Toggle { keys } => {
            for key in &keys {
                if !NotificationPrefs::is_known(key) {
                    eprintln!("warning: '{}' is not a built-in preference", key);
                }
                settings.toggle(key);
            }
        }
        PrefsAction::Set { key, value } => {
            if !NotificationPrefs::is_known(&key) {
                eprintln!("warning: '{}' is not a built-in preference", key);
            }
            settings.set(&key, value);
        }
    }

    settings
        .save(&ctx.store, user)
        .map_err(|e| format!("failed to save preferences: {}", e))?;
    if !json {
        println!("notification preferences saved");
    }
    print_prefs(settings.prefs(), json)
}

fn apply_profile_args(settings: &mut ProfileSettings, args: ProfileSetArgs) {
    settings.edit(|p| {
        if let Some(v) = args.name {
            p.full_name = v;
        }
        if let Some(v) = args.email {
            p.email = v;
        }
        if let Some(v) = args.phone {
            p.phone = v;
        }
        if let Some(v) = args.timezone {
            p.timezone = v;
        }
        if let Some(v) = args.bio {
            p.bio = v;
        }
        if let Some(v) = args.avatar_url {
            p.avatar_url = v;
        }
    });
}

pub(super) fn cmd_profile(
    ctx: &Context,
    args: ProfileCmd,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = require_user(ctx)?;
    let mut settings = ProfileSettings::load(&ctx.store, user)?;

    if let Some(ProfileAction::Set(set)) = args.action {
        if set.is_empty() {
            return Err("nothing to change (see `roster profile set --help`)".into());
        }
        if let Some(tz) = &set.timezone
            && timezone_label(tz).is_none()
        {
            return Err(format!("unknown timezone '{}' (see `roster options`)", tz).into());
        }
        apply_profile_args(&mut settings, set);
        settings
            .save(&ctx.store, user)
            .map_err(|e| format!("failed to update profile: {}", e))?;
        if !json {
            println!("profile updated");
        }
    }

    if json {
        print_json(&ProfileJson {
            profile: settings.profile(),
            initials: settings.initials(),
        })
    } else {
        for line in format_profile(settings.profile()) {
            println!("{}", line);
        }
        Ok(())
    }
}
