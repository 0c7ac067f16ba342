use iced::widget::{button, center, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Task};

use cineradar_core::shell::AuthForm;
use cineradar_runtime::AuthOutcome;

use crate::app::{self, Services};
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};

/// Login / signup form state. Which form is showing lives in the shell.
#[derive(Debug, Default)]
pub struct Auth {
    pub username: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
    /// A logout is still in flight; signing in again waits for it.
    pub signing_out: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    SwitchForm,
    Finished(AuthOutcome),
}

impl Auth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything typed, e.g. after logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(&mut self, msg: Message, form: AuthForm, services: &Services) -> Action {
        match msg {
            Message::UsernameChanged(v) => {
                self.username = v;
                Action::None
            }
            Message::EmailChanged(v) => {
                self.email = v;
                Action::None
            }
            Message::PasswordChanged(v) => {
                self.password = v;
                Action::None
            }
            Message::SwitchForm => {
                self.error = None;
                Action::ShowAuthForm(match form {
                    AuthForm::Login => AuthForm::Signup,
                    AuthForm::Signup => AuthForm::Login,
                })
            }
            Message::Submit => {
                if self.submitting || self.signing_out {
                    return Action::None;
                }
                if let Some(problem) = self.missing_field(form) {
                    self.error = Some(problem.into());
                    return Action::None;
                }
                self.submitting = true;
                self.error = None;

                let session = services.session.clone();
                let username = self.username.trim().to_string();
                let email = self.email.trim().to_string();
                let password = self.password.clone();
                Action::RunTask(Task::perform(
                    async move {
                        match form {
                            AuthForm::Login => session.login(&username, &password).await,
                            AuthForm::Signup => session.signup(&username, &email, &password).await,
                        }
                    },
                    |outcome| app::Message::Auth(Message::Finished(outcome)),
                ))
            }
            Message::Finished(outcome) => {
                self.submitting = false;
                match outcome {
                    AuthOutcome::Success(user) => {
                        self.reset();
                        Action::Authenticated(user)
                    }
                    AuthOutcome::Failure { message } => {
                        self.password.clear();
                        self.error = Some(message);
                        Action::None
                    }
                }
            }
        }
    }

    fn missing_field(&self, form: AuthForm) -> Option<&'static str> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Some("Username and password are required");
        }
        if form == AuthForm::Signup && self.email.trim().is_empty() {
            return Some("Email is required");
        }
        None
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, form: AuthForm) -> Element<'a, Message> {
        let (heading, submit_label, toggle_prompt, toggle_label) = match form {
            AuthForm::Login => ("Log in", "Log in", "No account yet?", "Sign up"),
            AuthForm::Signup => ("Sign up", "Create account", "Already registered?", "Log in"),
        };

        let input = |placeholder: &'a str, value: &'a str| {
            text_input(placeholder, value)
                .size(style::TEXT_BASE)
                .padding(style::INPUT_PADDING)
                .width(Length::Fill)
                .style(theme::text_input_style(cs))
        };

        let mut fields = column![input("Username", &self.username)
            .on_input(Message::UsernameChanged)
            .on_submit(Message::Submit)]
        .spacing(style::SPACE_SM);

        if form == AuthForm::Signup {
            fields = fields.push(
                input("Email", &self.email)
                    .on_input(Message::EmailChanged)
                    .on_submit(Message::Submit),
            );
        }

        fields = fields.push(
            input("Password", &self.password)
                .secure(true)
                .on_input(Message::PasswordChanged)
                .on_submit(Message::Submit),
        );

        let mut body = column![
            row![
                lucide_icons::iced::icon_clapperboard()
                    .size(style::TEXT_2XL)
                    .color(cs.primary),
                text("CineRadar")
                    .size(style::TEXT_2XL)
                    .font(style::FONT_HEADING)
                    .line_height(style::LINE_HEIGHT_TIGHT),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
            text(heading)
                .size(style::TEXT_LG)
                .color(cs.on_surface_variant),
            fields,
        ]
        .spacing(style::SPACE_LG)
        .width(Length::Fill);

        if let Some(error) = &self.error {
            body = body.push(
                text(error.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.error)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }

        let busy = self.submitting || self.signing_out;
        let label = if self.signing_out {
            "Signing out..."
        } else if self.submitting {
            "Please wait..."
        } else {
            submit_label
        };
        body = body.push(
            button(text(label).size(style::TEXT_SM).center().width(Length::Fill))
                .width(Length::Fill)
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press_maybe((!busy).then_some(Message::Submit))
                .style(theme::primary_button(cs)),
        );

        body = body.push(
            row![
                text(toggle_prompt)
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant),
                button(text(toggle_label).size(style::TEXT_SM))
                    .padding(0)
                    .on_press(Message::SwitchForm)
                    .style(theme::link_button(cs)),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        );

        center(
            container(body)
                .width(Length::Fixed(style::AUTH_FORM_WIDTH))
                .padding(style::SPACE_2XL)
                .style(theme::dialog_container(cs)),
        )
        .into()
    }
}
