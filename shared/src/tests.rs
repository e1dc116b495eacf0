#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use crate::contact::{decode_form, ContactField, ContactRequest, FormSubmission, EncodingError};
    use crate::landing::{Effect, LandingConfig, LandingState, SubmitError, RESET_DELAY_MS, SUBMIT_FAILURE_ALERT};
    use crate::logo::{LogoError, LogoPreview, LogoView, ObjectUrlStore, LOGO_ALT};
    use crate::social::SocialPlatform;
    use crate::user_info::{client_ip, generate_server_fingerprint};
    use crate::validation::{validate_contact_request, validate_required, ValidationError};

    fn filled_state() -> LandingState {
        let mut state = LandingState::default();
        state.update_field(ContactField::Name, "Ada Lovelace");
        state.update_field(ContactField::Email, "a@b.com");
        state.update_field(ContactField::Company, "Analytical Engines & Co");
        state.update_field(ContactField::Phone, "+1 (555) 123-4567");
        state.update_field(ContactField::PreferredDate, "2026-11-02");
        state.update_field(ContactField::Message, "Loyalty points = 100%?\nCall me.");
        state
    }

    #[derive(Clone, Default)]
    struct FakeObjectUrls {
        created: Rc<Cell<u32>>,
        revoked: Rc<RefCell<Vec<String>>>,
    }

    impl ObjectUrlStore for FakeObjectUrls {
        type Handle = &'static str;

        fn create(&self, handle: &Self::Handle) -> Result<String, LogoError> {
            if handle.is_empty() {
                return Err(LogoError::PreviewUnavailable("empty file".into()));
            }
            self.created.set(self.created.get() + 1);
            Ok(format!("blob:local/{}-{}", handle, self.created.get()))
        }

        fn revoke(&self, url: &str) {
            self.revoked.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_submit_builds_single_request_that_round_trips() {
        let mut state = filled_state();
        let request = state.begin_submit().unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/");
        assert_eq!(request.content_type, "application/x-www-form-urlencoded");

        let decoded = FormSubmission::decode(&request.body).unwrap();
        assert_eq!(decoded.form_name, "contact");
        assert_eq!(decoded.honeypot, "");
        assert_eq!(&decoded.contact, state.contact());

        let pairs = decode_form(&request.body).unwrap();
        assert_eq!(pairs.iter().filter(|(k, _)| k == "form-name").count(), 1);
        let keys: Vec<_> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["form-name", "bot-field", "name", "email", "company", "phone", "preferredDate", "message"]);
    }

    #[test]
    fn test_submit_requires_name_and_email() {
        let mut state = LandingState::default();
        state.update_field(ContactField::Email, "a@b.com");
        assert_eq!(state.begin_submit(), Err(ValidationError::MissingField("name")));

        state.update_field(ContactField::Name, "Ada");
        state.update_field(ContactField::Email, "");
        assert_eq!(state.begin_submit(), Err(ValidationError::MissingField("email")));
    }

    #[test]
    fn test_whitespace_satisfies_required_like_the_browser() {
        let mut state = LandingState::default();
        state.update_field(ContactField::Name, "   ");
        state.update_field(ContactField::Email, "a@b.com");

        let request = state.begin_submit().unwrap();
        let decoded = FormSubmission::decode(&request.body).unwrap();
        assert_eq!(decoded.contact.name, "   ");
        assert_eq!(validate_contact_request(&decoded.contact), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_double_submit_is_not_guarded() {
        let mut state = filled_state();
        let first = state.begin_submit().unwrap();
        let second = state.begin_submit().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert_eq!(first.body, second.body);
    }

    #[test]
    fn test_success_shows_thank_you_with_email() {
        let mut state = filled_state();
        assert_eq!(state.thank_you_message(), None);

        let request = state.begin_submit().unwrap();
        let effect = state.complete_submit(request.ticket, Ok(()));

        assert!(state.is_submitted());
        assert_eq!(effect, Effect::ScheduleReset { ticket: request.ticket, delay_ms: 5000 });
        assert!(state.thank_you_message().unwrap().contains("a@b.com"));
    }

    #[test]
    fn test_reset_after_delay_clears_every_field() {
        let mut state = filled_state();
        let request = state.begin_submit().unwrap();
        let Effect::ScheduleReset { ticket, delay_ms } = state.complete_submit(request.ticket, Ok(())) else {
            panic!("expected a scheduled reset");
        };
        assert_eq!(delay_ms, RESET_DELAY_MS);
        assert_eq!(RESET_DELAY_MS, 5000);

        assert!(!state.contact().is_empty());
        assert!(state.reset_elapsed(ticket));
        assert!(state.contact().is_empty());
        assert!(!state.is_submitted());
        assert!(state.thank_you_message().is_none());
        for field in ContactField::ALL {
            assert_eq!(state.contact().get(field), "", "{} not cleared", field.name());
        }
    }

    #[test]
    fn test_failed_submit_preserves_fields() {
        let mut state = filled_state();
        let before = state.contact().clone();
        let request = state.begin_submit().unwrap();

        let effect = state.complete_submit(request.ticket, Err(SubmitError::Transport("offline".into())));

        assert_eq!(effect, Effect::Alert(SUBMIT_FAILURE_ALERT));
        assert_eq!(SUBMIT_FAILURE_ALERT, "Something went wrong. Please try again.");
        assert!(!state.is_submitted());
        assert!(state.thank_you_message().is_none());
        assert!(state.pending_reset().is_none());
        assert_eq!(state.contact(), &before);
    }

    #[test]
    fn test_stale_and_cancelled_resets_are_ignored() {
        let mut state = filled_state();
        let first = state.begin_submit().unwrap();
        let second = state.begin_submit().unwrap();
        state.complete_submit(first.ticket, Ok(()));
        state.complete_submit(second.ticket, Ok(()));

        assert!(!state.reset_elapsed(first.ticket));
        assert!(state.is_submitted());
        assert!(state.reset_elapsed(second.ticket));
        assert!(!state.reset_elapsed(second.ticket));

        let mut state = filled_state();
        let request = state.begin_submit().unwrap();
        state.complete_submit(request.ticket, Ok(()));
        assert_eq!(state.cancel_pending_reset(), Some(request.ticket));
        assert!(!state.reset_elapsed(request.ticket));
        assert_eq!(state.contact().email, "a@b.com");
    }

    #[test]
    fn test_field_updates_last_write_wins() {
        let mut state = LandingState::default();
        assert!(state.update_field_by_name("preferredDate", "2026-01-01"));
        assert!(state.update_field_by_name("preferredDate", "2026-02-02"));
        assert!(!state.update_field_by_name("bot-field", "spam"));
        assert_eq!(state.contact().preferred_date, "2026-02-02");
    }

    #[test]
    fn test_social_edit_updates_footer_link() {
        let mut state = LandingState::default();
        assert!(state.footer_links().iter().all(|link| link.href == "#"));

        state.open_settings();
        state.update_social(SocialPlatform::Twitter, "https://twitter.com/x");
        state.save_settings();

        assert!(!state.is_settings_open());
        let twitter = state.footer_links().into_iter()
            .find(|link| link.platform == SocialPlatform::Twitter)
            .unwrap();
        assert_eq!(twitter.href, "https://twitter.com/x");
        assert_eq!(twitter.label, "Twitter");
    }

    #[test]
    fn test_social_links_seeded_and_reseeded_from_config() {
        let config = LandingConfig {
            linkedin_url: "https://linkedin.com/in/maartand".into(),
            ..LandingConfig::default()
        };
        let mut state = LandingState::new(config.clone());
        assert_eq!(state.social().href(SocialPlatform::Linkedin), "https://linkedin.com/in/maartand");

        state.update_social(SocialPlatform::Linkedin, "edited");
        assert!(!state.apply_config(config.clone()));
        assert_eq!(state.social().linkedin, "edited");

        let updated = LandingConfig { instagram_url: "https://instagram.com/m".into(), ..config };
        assert!(state.apply_config(updated));
        assert_eq!(state.social().linkedin, "https://linkedin.com/in/maartand");
        assert_eq!(state.social().instagram, "https://instagram.com/m");
    }

    #[test]
    fn test_logo_config_change_keeps_social_edits() {
        let config = LandingConfig {
            twitter_url: "https://twitter.com/maartand".into(),
            ..LandingConfig::default()
        };
        let mut state = LandingState::new(config.clone());
        state.update_social(SocialPlatform::Twitter, "https://twitter.com/x");

        let relogoed = LandingConfig { logo_src: "/brand.png".into(), ..config };
        assert!(state.apply_config(relogoed));
        assert_eq!(state.config().logo_src, "/brand.png");
        assert_eq!(state.social().twitter, "https://twitter.com/x");
    }

    #[test]
    fn test_menu_and_settings_flags() {
        let mut state = LandingState::default();
        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());
        state.toggle_menu();
        state.close_menu();
        assert!(!state.is_menu_open());

        state.open_settings();
        assert!(state.is_settings_open());
        state.close_settings();
        assert!(!state.is_settings_open());
    }

    #[test]
    fn test_logo_selection_replaces_upload_button() {
        let state = LandingState::default();
        let urls = FakeObjectUrls::default();
        let mut preview = LogoPreview::new(urls.clone());
        assert_eq!(state.logo_view(preview.current()), LogoView::UploadButton);

        let src = preview.select(&"logo.png").unwrap().to_string();
        assert_eq!(
            state.logo_view(preview.current()),
            LogoView::Image { src: src.clone(), alt: LOGO_ALT }
        );
        assert_eq!(src, "blob:local/logo.png-1");
    }

    #[test]
    fn test_logo_preview_revokes_on_replace_and_drop() {
        let urls = FakeObjectUrls::default();
        {
            let mut preview = LogoPreview::new(urls.clone());
            preview.select(&"first.png").unwrap();
            preview.select(&"second.png").unwrap();
            assert_eq!(*urls.revoked.borrow(), vec!["blob:local/first.png-1".to_string()]);
            assert!(preview.select(&"").is_err());
            assert_eq!(preview.current(), Some("blob:local/second.png-2"));
        }
        assert_eq!(urls.revoked.borrow().len(), 2);
        assert_eq!(urls.revoked.borrow()[1], "blob:local/second.png-2");
    }

    #[test]
    fn test_configured_logo_used_until_local_preview() {
        let state = LandingState::new(LandingConfig {
            logo_src: "https://cdn.example.com/logo.svg".into(),
            ..LandingConfig::default()
        });
        assert_eq!(
            state.logo_view(None),
            LogoView::Image { src: "https://cdn.example.com/logo.svg".into(), alt: LOGO_ALT }
        );
        assert_eq!(
            state.logo_view(Some("blob:local/x")),
            LogoView::Image { src: "blob:local/x".into(), alt: LOGO_ALT }
        );
    }

    #[test]
    fn test_decode_browser_encoded_body() {
        let body = "form-name=contact&bot-field=&name=Jane+Doe&email=jane%40corp.io&message=a%2Bb+c&extra=1";
        let submission = FormSubmission::decode(body).unwrap();
        assert_eq!(submission.contact.name, "Jane Doe");
        assert_eq!(submission.contact.email, "jane@corp.io");
        assert_eq!(submission.contact.message, "a+b c");
        assert!(!submission.is_bot());
        assert!(submission.ensure_contact_form().is_ok());
    }

    #[test]
    fn test_decode_rejects_missing_or_unknown_form() {
        assert_eq!(FormSubmission::decode("name=x"), Err(EncodingError::MissingFormName));
        let other = FormSubmission::decode("form-name=newsletter").unwrap();
        assert_eq!(other.ensure_contact_form(), Err(EncodingError::UnknownForm("newsletter".into())));
        assert!(matches!(FormSubmission::decode("form-name=%FF"), Err(EncodingError::InvalidEncoding(_))));
    }

    #[test]
    fn test_honeypot_value_is_forwarded() {
        let mut state = filled_state();
        let request = state.begin_submit_with_honeypot("filled by bot").unwrap();
        let decoded = FormSubmission::decode(&request.body).unwrap();
        assert!(decoded.is_bot());
        assert_eq!(&decoded.contact, state.contact());
    }

    #[test]
    fn test_honeypot_marks_bot() {
        let submission = FormSubmission::new(ContactRequest::default()).with_honeypot("http://spam");
        let decoded = FormSubmission::decode(&submission.encode()).unwrap();
        assert!(decoded.is_bot());
    }

    #[test]
    fn test_server_validation() {
        let mut contact = ContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            ..ContactRequest::default()
        };
        assert!(validate_required(&contact).is_ok());
        assert!(validate_contact_request(&contact).is_ok());

        contact.email = "not-an-email".into();
        assert_eq!(validate_contact_request(&contact), Err(ValidationError::InvalidEmail));

        contact.email = "ada@example.com".into();
        contact.preferred_date = "02/11/2026".into();
        assert_eq!(validate_contact_request(&contact), Err(ValidationError::InvalidDate));

        contact.preferred_date = "2026-11-02".into();
        contact.phone = "1".repeat(33);
        assert_eq!(
            validate_contact_request(&contact),
            Err(ValidationError::FieldTooLong { field: "phone", max: 32 })
        );
    }

    #[test]
    fn test_client_ip_and_fingerprint() {
        assert_eq!(client_ip(Some("10.0.0.1"), Some("1.1.1.1")), "10.0.0.1");
        assert_eq!(client_ip(None, Some("1.1.1.1, 2.2.2.2")), "1.1.1.1");
        assert_eq!(client_ip(None, None), "0.0.0.0");

        let a = generate_server_fingerprint("1.1.1.1", Some("agent"));
        assert_eq!(a, generate_server_fingerprint("1.1.1.1", Some("agent")));
        assert_ne!(a, generate_server_fingerprint("1.1.1.1", None));
    }
}
