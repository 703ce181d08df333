//! Interactive front-of-house console. One rustyline loop drives the whole
//! application: the session authority gates each command by minimum role,
//! and every mutation reports through the console notification sink.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::auth::{default_roster, SessionAuthority};
use crate::directory::{NewStaffUser, StaffRole, UserDirectory};
use crate::intake::{CustomerBook, NewCustomer, Prescription, PriorityType};
use crate::notify::{ConsoleSink, Notification, NotificationSink};
use crate::profile::ProfileCard;

use super::tablefmt::print_table;

const HELP: &str = "\
commands:
  login <username> <password>   sign in
  logout                        sign out
  whoami                        show the signed-in identity
  profile                       show the profile card
  queue                         waiting customers          (cashier)
  register                      register a walk-in         (sales)
  staff                         list staff accounts        (admin)
  staff add                     create a staff account     (admin)
  staff role <id> <role>        change a staff role        (admin)
  help                          this text
  quit                          exit";

pub struct Console {
    auth: SessionAuthority,
    directory: UserDirectory,
    book: CustomerBook,
    sink: Arc<ConsoleSink>,
}

impl Console {
    pub fn new() -> Self {
        let sink: Arc<ConsoleSink> = Arc::new(ConsoleSink);
        Console {
            auth: SessionAuthority::new(Arc::new(default_roster().clone()), sink.clone()),
            directory: UserDirectory::with_mock_users(sink.clone()),
            book: CustomerBook::new(sink.clone()),
            sink,
        }
    }

    pub fn run(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        println!("optiqueue front of house. Type 'help' for commands.");
        loop {
            let readline = rl.readline(&self.prompt());
            let line = match readline {
                Ok(l) => l,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            let _ = rl.add_history_entry(line.as_str());
            if !self.dispatch(&mut rl, &line)? {
                break;
            }
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        match self.auth.principal() {
            Some(p) => format!("{}@optiqueue> ", p.name),
            None => format!("{}@optiqueue (signed out)> ", whoami::username()),
        }
    }

    // Returns false when the loop should terminate.
    fn dispatch(&self, rl: &mut DefaultEditor, line: &str) -> Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        debug!(target: "console", "dispatch cmd={:?}", parts.first());
        match parts.as_slice() {
            ["quit"] | ["exit"] => return Ok(false),
            ["help"] => println!("{}", HELP),
            ["login", username, password] => {
                let _ = self.auth.login(username, password);
            }
            ["login", ..] => println!("usage: login <username> <password>"),
            ["logout"] => self.auth.logout(),
            ["whoami"] => match self.auth.principal() {
                Some(p) => println!("{} <{}> role={}", p.name, p.email, p.role),
                None => println!("not signed in"),
            },
            ["profile"] => self.show_profile(),
            ["queue"] => {
                if self.gate("cashier") {
                    self.show_queue();
                }
            }
            ["register"] => {
                if self.gate("sales") {
                    self.register_walk_in(rl)?;
                }
            }
            ["staff"] => {
                if self.gate("admin") {
                    self.show_staff();
                }
            }
            ["staff", "add"] => {
                if self.gate("admin") {
                    self.add_staff(rl)?;
                }
            }
            ["staff", "role", id, role] => {
                if self.gate("admin") {
                    match StaffRole::from_str(role) {
                        Ok(r) => {
                            let _ = self.directory.update_role(id, r);
                        }
                        Err(()) => println!("unknown role '{}' (admin|sales_employee|cashier)", role),
                    }
                }
            }
            _ => println!("unknown command, try 'help'"),
        }
        Ok(true)
    }

    /// Feature gate: callers name the minimum role a command needs.
    fn gate(&self, required: &str) -> bool {
        if self.auth.has_role(required) {
            return true;
        }
        self.sink.notify(Notification::error(format!(
            "Access denied: requires {} role",
            required
        )));
        false
    }

    fn show_profile(&self) {
        let Some(p) = self.auth.principal() else {
            println!("not signed in");
            return;
        };
        let card = ProfileCard::for_principal(&p);
        println!("+----------------------------------------+");
        println!("| {:38} |", card.name);
        println!("| {:38} |", card.email);
        println!("| {:38} |", format!("{} ({:?})", card.role_label, card.badge));
        println!("| {:38} |", card.role_description);
        println!("| {:38} |", format!("signed in {}", card.login_date));
        println!("+----------------------------------------+");
    }

    fn show_queue(&self) {
        let waiting = self.book.waiting();
        print_table(
            &["name", "contact", "priority", "agent", "wait"],
            &waiting,
            |c| {
                vec![
                    c.name.clone(),
                    c.contact_number.clone(),
                    c.priority.to_string(),
                    c.sales_agent.clone(),
                    c.wait_time.to_string(),
                ]
            },
        );
    }

    fn show_staff(&self) {
        let users = self.directory.list();
        print_table(&["id", "name", "email", "role", "created"], &users, |u| {
            vec![
                u.id.clone(),
                u.name.clone(),
                u.email.clone(),
                u.role.display_name().to_string(),
                u.created_at.clone(),
            ]
        });
    }

    fn register_walk_in(&self, rl: &mut DefaultEditor) -> Result<()> {
        let name = ask(rl, "full name: ")?;
        let contact_number = ask(rl, "contact number: ")?;
        let email = ask(rl, "email (optional): ")?;
        let age = ask(rl, "age (optional): ")?;
        let sales_agent = ask(rl, "sales agent (optional): ")?;
        let priority_raw = ask(rl, "priority [Regular|Priority|Emergency]: ")?;
        let priority = PriorityType::from_str(&priority_raw).unwrap_or_default();
        let new = NewCustomer {
            name,
            contact_number,
            email,
            age: age.parse().ok(),
            sales_agent,
            priority,
            prescription: Prescription::default(),
            ..NewCustomer::default()
        };
        let _ = self.book.register(new);
        Ok(())
    }

    fn add_staff(&self, rl: &mut DefaultEditor) -> Result<()> {
        let name = ask(rl, "full name: ")?;
        let email = ask(rl, "email: ")?;
        let password = ask(rl, "password: ")?;
        let role_raw = ask(rl, "role [admin|sales_employee|cashier]: ")?;
        let role = StaffRole::from_str(&role_raw).unwrap_or(StaffRole::SalesEmployee);
        let _ = self.directory.create_user(NewStaffUser {
            name,
            email,
            password,
            role,
        });
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn ask(rl: &mut DefaultEditor, prompt: &str) -> Result<String> {
    match rl.readline(prompt) {
        Ok(l) => Ok(l.trim().to_string()),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}
