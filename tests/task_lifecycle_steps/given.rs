//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, due_in, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;
use taskboard::user::{
    domain::{EmailAddress, Password, PasswordHash, User, UserName},
    ports::UserRepository,
};

#[given(r#"a registered user "{name}" with email "{email}""#)]
fn registered_user(
    world: &mut TaskLifecycleWorld,
    name: String,
    email: String,
) -> Result<(), eyre::Report> {
    let password = Password::new("s3cret!").wrap_err("scenario password")?;
    let user = User::register(
        UserName::new(name).wrap_err("scenario user name")?,
        EmailAddress::new(email.clone()).wrap_err("scenario email")?,
        PasswordHash::derive(&password).wrap_err("hash scenario password")?,
        &DefaultClock,
    );
    run_async(world.users.store(&user)).wrap_err("store scenario user")?;
    world.user_ids.insert(email, user.id());
    Ok(())
}

#[given(r#"a task "{title}" due in {days:i64} days exists"#)]
fn existing_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    let creator = world.creator()?;
    let request = CreateTaskRequest::new(
        title,
        "Scenario task",
        creator.to_string(),
        due_in(days),
    );
    let task = run_async(world.service.create_task(request, creator))
        .wrap_err("create task in scenario setup")?;
    world.last_task = Some(task);
    Ok(())
}
