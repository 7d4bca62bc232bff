//! EventFlow client CLI
//!
//! Main application entry point

use tracing::info;

use eventflow_client::{
    config::Settings,
    models::event::Event,
    models::user::UserRole,
    services::{RegistrationEligibility, ServiceFactory},
    state::Session,
    utils::logging,
    views::{
        calendar, AdminDashboardView, AttendeeDashboardView, EventDetailView, EventListView,
        OrganizerDashboardView, RefreshTrigger,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting EventFlow client...");

    // Initialize session (loads any persisted token)
    let session = match settings.auth.token_file {
        Some(ref path) => Session::with_store(path),
        None => Session::new(),
    };

    // Initialize services
    let services = ServiceFactory::new(&settings, session)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = run_command(&services, &args).await;

    if let Err(ref e) = result {
        // Session expiry carries the redirect target for interactive UIs
        if let Some(path) = services.session().redirect_path() {
            eprintln!("Session expired. Please log in again ({}).", path);
        } else {
            eprintln!("{}", e.user_message());
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run_command(
    services: &ServiceFactory,
    args: &[String],
) -> eventflow_client::Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["login", email, password] => {
            services.auth_service.login(email, password).await?;
            let context = services.auth_service.establish_context().await?;
            println!(
                "Logged in as {} ({:?})",
                context.user.display_name(),
                context.user.role
            );
        }
        ["logout"] => {
            services.auth_service.logout();
            println!("Logged out");
        }
        ["events"] => {
            let mut view = EventListView::new(services.event_service.clone());
            view.load().await?;
            print_events(&view.visible());
        }
        ["events", query] => {
            let mut view = EventListView::new(services.event_service.clone());
            view.load().await?;
            view.set_search(*query);
            print_events(&view.visible());
        }
        ["show", event_id] => {
            let context = services.auth_service.establish_context().await?;
            let mut view = EventDetailView::new(
                services.capacity_service.clone(),
                services.registration_service.clone(),
                *event_id,
                context.user.id.clone(),
            );
            let snapshot = view.load().await?;
            print_snapshot_header(snapshot);
        }
        ["register", event_id] => {
            let context = services.auth_service.establish_context().await?;
            let mut view = EventDetailView::new(
                services.capacity_service.clone(),
                services.registration_service.clone(),
                *event_id,
                context.user.id.clone(),
            );
            view.load().await?;
            let registration = view.register(None).await?;
            println!("Registration status: {:?}", registration.status);
        }
        ["cancel", event_id] => {
            let context = services.auth_service.establish_context().await?;
            let mut view = EventDetailView::new(
                services.capacity_service.clone(),
                services.registration_service.clone(),
                *event_id,
                context.user.id.clone(),
            );
            view.refresh(RefreshTrigger::Mount).await?;
            view.cancel_registration().await?;
            println!("Registration cancelled");
        }
        ["dashboard"] => {
            let context = services.auth_service.establish_context().await?;
            match context.user.role {
                UserRole::Attendee => {
                    let mut view = AttendeeDashboardView::new(
                        services.dashboard_service.clone(),
                        services.event_service.clone(),
                        context,
                    );
                    view.load().await?;
                    if let Some(ref dashboard) = view.dashboard {
                        println!("Active registrations: {}", dashboard.count);
                    }
                    println!("Suggested upcoming events: {}", view.upcoming.len());
                }
                UserRole::Organizer => {
                    let mut view = OrganizerDashboardView::new(
                        services.dashboard_service.clone(),
                        context,
                    );
                    view.load().await?;
                    if let Some(ref dashboard) = view.dashboard {
                        print_stats(&dashboard.stats);
                    }
                }
                UserRole::Admin => {
                    let mut view =
                        AdminDashboardView::new(services.dashboard_service.clone(), context);
                    view.load().await?;
                    if let Some(ref dashboard) = view.dashboard {
                        print_stats(&dashboard.stats);
                    }
                }
            }
        }
        ["calendar", year, month] => {
            let year: i32 = year.parse().map_err(|_| {
                eventflow_client::EventFlowError::Validation("Invalid year".to_string())
            })?;
            let month: u32 = month.parse().map_err(|_| {
                eventflow_client::EventFlowError::Validation("Invalid month".to_string())
            })?;

            let mut view = EventListView::new(services.event_service.clone());
            view.load().await?;
            let events: Vec<_> = view.visible().into_iter().cloned().collect();

            for day in calendar::month_grid(year, month)? {
                let on_day = calendar::events_on(day.date, &events);
                if day.in_month && !on_day.is_empty() {
                    println!("{}", day.date);
                    for event in on_day {
                        println!("  {}  {}", event.id, event.title);
                    }
                }
            }
        }
        ["profile"] => {
            let user = services.user_service.profile().await?;
            println!("{} <{}> ({:?})", user.display_name(), user.email, user.role);
        }
        _ => {
            print_usage();
        }
    }

    Ok(())
}

fn print_events(events: &[&Event]) {
    if events.is_empty() {
        println!("No events found");
        return;
    }
    for event in events {
        println!(
            "{}  {}  [{:?}]  {}/{} registered",
            event.id,
            event.title,
            event.category,
            event.registered_count,
            event.capacity
        );
    }
}

fn print_snapshot_header(snapshot: &eventflow_client::CapacitySnapshot) {
    let event = &snapshot.event;
    println!("{} ({:?})", event.title, event.status);
    println!(
        "  {} / {} registered, {} remaining",
        snapshot.registered_count, event.capacity, snapshot.remaining
    );
    match snapshot.eligibility {
        RegistrationEligibility::Open { remaining } => {
            println!("  Spots available: {} seats remaining", remaining)
        }
        RegistrationEligibility::WaitlistOnly => {
            println!("  Event is full. You can join the waitlist")
        }
        RegistrationEligibility::AlreadyRegistered => match snapshot.user_registration {
            Some(ref registration) => {
                println!("  Registration {:?}", registration.status)
            }
            None => println!("  Already registered"),
        },
        RegistrationEligibility::Closed { .. } => println!("  Registration closed"),
    }
}

fn print_stats(stats: &eventflow_client::models::dashboard::DashboardStats) {
    println!(
        "Events: {} total, {} upcoming, {} completed; registrations: {}",
        stats.total_events, stats.upcoming_events, stats.completed_events,
        stats.total_registrations
    );
}

fn print_usage() {
    println!("EventFlow client commands:");
    println!("  login <email> <password>");
    println!("  logout");
    println!("  events [query]");
    println!("  show <event-id>");
    println!("  register <event-id>");
    println!("  cancel <event-id>");
    println!("  dashboard");
    println!("  calendar <year> <month>");
    println!("  profile");
}
