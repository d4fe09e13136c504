use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use tracing::info;

use appointment_form_cell::component::{Navigator, Notifier};
use appointment_form_cell::models::Field;
use appointment_form_cell::view::{Control, FormView};
use appointment_form_cell::AppointmentCreationForm;

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, title: &str) {
        println!("\n✔ {title}");
    }

    fn error(&self, title: &str, message: &str) {
        println!("\n✖ {title} {message}");
    }
}

/// Records the route the component asks for; the shell exits once the
/// component navigates away.
#[derive(Default)]
pub struct TerminalNavigator {
    target: Mutex<Option<String>>,
}

impl TerminalNavigator {
    pub fn destination(&self) -> Option<String> {
        self.target.lock().unwrap().clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        info!("Navigating to {}", route);
        *self.target.lock().unwrap() = Some(route.to_string());
    }
}

fn print_view(form: &AppointmentCreationForm) {
    match form.render() {
        FormView::Restricted { notice } => println!("\n{notice}"),
        FormView::Form(body) => {
            println!("\n== {} ==", body.title);
            for field in &body.fields {
                match &field.control {
                    Control::Hidden => continue,
                    Control::ReadOnly => println!("{}: {}", field.label, field.value),
                    Control::Select { placeholder, options } => {
                        let shown = if field.value.is_empty() {
                            placeholder.as_deref().unwrap_or("")
                        } else {
                            field.value.as_str()
                        };
                        println!("{} [{}]: {}", field.label, field.field.name(), shown);
                        for option in options {
                            println!("    {} -> {}", option.value, option.label);
                        }
                    }
                    _ => println!("{} [{}]: {}", field.label, field.field.name(), field.value),
                }
                if let Some(error) = &field.error {
                    println!("  ! {error}");
                }
            }
            println!("[{}] ordenes: set <campo> <valor> | enviar | salir", body.submit_label);
        }
    }
}

pub async fn run(
    form: &mut AppointmentCreationForm,
    navigator: &TerminalNavigator,
) -> anyhow::Result<()> {
    if matches!(form.render(), FormView::Restricted { .. }) {
        print_view(form);
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        print_view(form);
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        if line == "salir" {
            return Ok(());
        }

        if line == "enviar" {
            form.submit().await;
            if let Some(route) = navigator.destination() {
                info!("Leaving the form for {}", route);
                return Ok(());
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("set ") {
            let mut parts = rest.splitn(2, ' ');
            let name = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default().trim();
            match Field::from_name(name) {
                Some(field) => form.handle_change(field, value),
                None => println!("Campo desconocido: {name}"),
            }
            continue;
        }

        if !line.is_empty() {
            println!("Orden desconocida: {line}");
        }
    }
}
