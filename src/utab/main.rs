use clap::Parser;
use colored::*;
use unicode_width::UnicodeWidthStr;
use utab::api::UtabApi;
use utab::client::HttpSource;
use utab::commands::export::ExportFormat;
use utab::commands::stats::Summary;
use utab::commands::{CmdMessage, MessageLevel};
use utab::config::UtabConfig;
use utab::error::{Result, UtabError};
use utab::model::User;
use utab::route::LIST_TOKEN;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = UtabConfig::from_env().with_base_url(cli.base_url.clone());
    let source = HttpSource::new(&config.base_url)?;
    let mut api = UtabApi::new(source);

    let token = match &cli.id {
        Some(id) => format!("{}/{}", LIST_TOKEN, id),
        None => LIST_TOKEN.to_string(),
    };

    let mut result = match api.navigate(&token, false) {
        Ok(result) => result,
        Err(UtabError::NotFound(id)) => {
            println!("{}", format!("User {} not found.", id).yellow());
            return Ok(());
        }
        // An undecodable payload surfaces the same way as a transport failure
        Err(UtabError::Fetch(reason) | UtabError::MalformedRecord(reason)) => {
            println!(
                "{}",
                format!("Request failed: {}. Re-run to retry.", reason).red()
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if let Some(user) = &result.user {
        print_messages(&result.messages);
        print_detail(user);
        return Ok(());
    }

    let messages = std::mem::take(&mut result.messages);

    if let Some(term) = &cli.search {
        result = api.search_changed(term)?;
    }
    if let Some(key) = &cli.sort {
        result = api.sort_requested(key)?;
        if cli.desc {
            // A second request on the active key flips the direction
            result = api.sort_requested(key)?;
        }
    }

    if let Some(format) = cli.export {
        let exported = api.export_requested(format)?;
        if let Some(payload) = &exported.export {
            match format {
                ExportFormat::Csv => print!("{}", payload),
                ExportFormat::Json => println!("{}", payload),
            }
        }
        return Ok(());
    }

    print_messages(&messages);
    print_messages(&result.messages);
    print_table(&result.listed_users);
    if cli.stats {
        if let Some(summary) = &result.summary {
            print_summary(summary);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

const COLUMN_WIDTHS: [usize; 6] = [4, 20, 15, 25, 15, 20];

fn print_table(users: &[User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    print_separator();
    print_row(["ID", "Name", "Username", "Email", "City", "Company"].map(String::from));
    print_separator();

    for user in users {
        print_row([
            user.id.to_string(),
            truncate_to_width(&user.name, COLUMN_WIDTHS[1]),
            truncate_to_width(&user.username, COLUMN_WIDTHS[2]),
            truncate_to_width(&user.email, COLUMN_WIDTHS[3]),
            truncate_to_width(&user.address.city, COLUMN_WIDTHS[4]),
            truncate_to_width(&user.company.name, COLUMN_WIDTHS[5]),
        ]);
    }

    print_separator();
    println!("\nTotal users displayed: {}", users.len());
}

fn print_separator() {
    let mut line = String::from("+");
    for width in COLUMN_WIDTHS {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    println!("{}", line);
}

fn print_row(cells: [String; 6]) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        let padding = width.saturating_sub(cell.width());
        line.push_str("| ");
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
    }
    line.push('|');
    println!("{}", line);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn print_detail(user: &User) {
    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("{}", format!("USER DETAILS - ID: {}", user.id).bold());
    println!("{}", rule);

    println!("Name:        {}", user.name);
    println!("Username:    {}", user.username);
    println!("Email:       {}", user.email);
    println!("Phone:       {}", user.phone);
    println!("Website:     {}", user.website);

    println!("\n{}", "Address:".bold());
    println!("  Street:    {}", user.address.street);
    println!("  Suite:     {}", user.address.suite);
    println!("  City:      {}", user.address.city);
    println!("  Zipcode:   {}", user.address.zipcode);
    println!("  Location:  {}, {}", user.address.geo.lat, user.address.geo.lng);

    println!("\n{}", "Company:".bold());
    println!("  Name:        {}", user.company.name);
    println!("  Catchphrase: {}", user.company.catch_phrase);
    println!("  Business:    {}", user.company.business_strategy);
    println!("{}", rule);
}

fn print_summary(summary: &Summary) {
    println!("\n{}", "Summary".bold());
    println!("Total: {}", summary.total);
    print_counts("By city", &summary.by_city);
    print_counts("By company", &summary.by_company);
}

fn print_counts(label: &str, groups: &[(String, usize)]) {
    let chips: Vec<String> = groups
        .iter()
        .map(|(name, count)| {
            let name = if name.is_empty() { "(unknown)" } else { name };
            format!("{}: {}", name, count)
        })
        .collect();
    println!("{}  {}", format!("{}:", label).dimmed(), chips.join("  "));
}
