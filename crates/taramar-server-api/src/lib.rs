// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod messages;
pub mod translations;

pub use messages::{LocaleResponse, LocalesResponse, MessagesQuery, MessagesResponse};
pub use translations::{
	LocaleFlags, LocaleStrings, SaveTranslationRequest, SaveTranslationResponse,
	SaveTranslationValues, TranslationErrorResponse, TranslationListResponse,
	TranslationRowResponse,
};
