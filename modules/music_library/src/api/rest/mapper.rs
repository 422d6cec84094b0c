//! Mapper implementations for converting between DTOs and contract models
//!
//! Update requests carrying `id`, `composerId` or `createdAt` lose them
//! here; those fields have no counterpart in the contract patch types.

use super::dto::*;
use crate::contract;

// ===== Composer conversions =====

impl From<contract::Composer> for ComposerDto {
    fn from(composer: contract::Composer) -> Self {
        Self {
            id: composer.id,
            name: composer.name,
            period: composer.period,
            image: composer.image,
            sheet_music_count: composer.sheet_music_count,
            recording_count: composer.recording_count,
            created_at: composer.created_at,
            works: composer.works.into_iter().map(Into::into).collect(),
            recordings: composer.recordings.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateComposerRequest> for contract::NewComposer {
    fn from(req: CreateComposerRequest) -> Self {
        Self {
            name: req.name,
            period: req.period,
            image: req.image,
        }
    }
}

impl From<UpdateComposerRequest> for contract::ComposerPatch {
    fn from(req: UpdateComposerRequest) -> Self {
        Self {
            name: req.name,
            period: req.period,
            image: req.image,
        }
    }
}

// ===== Work conversions =====

impl From<contract::Work> for WorkDto {
    fn from(work: contract::Work) -> Self {
        Self {
            id: work.id,
            composer_id: work.composer_id,
            title: work.title,
            edition: work.edition,
            year: work.year,
            file_url: work.file_url,
            created_at: work.created_at,
        }
    }
}

impl From<CreateWorkRequest> for contract::NewWork {
    fn from(req: CreateWorkRequest) -> Self {
        Self {
            composer_id: req.composer_id,
            title: req.title,
            edition: req.edition,
            year: req.year,
            file_url: req.file_url,
        }
    }
}

impl From<UpdateWorkRequest> for contract::WorkPatch {
    fn from(req: UpdateWorkRequest) -> Self {
        Self {
            title: req.title,
            edition: req.edition,
            year: req.year,
            file_url: req.file_url,
        }
    }
}

// ===== Recording conversions =====

impl From<contract::Recording> for RecordingDto {
    fn from(recording: contract::Recording) -> Self {
        Self {
            id: recording.id,
            composer_id: recording.composer_id,
            title: recording.title,
            performer: recording.performer,
            duration: recording.duration,
            year: recording.year,
            created_at: recording.created_at,
        }
    }
}

impl From<CreateRecordingRequest> for contract::NewRecording {
    fn from(req: CreateRecordingRequest) -> Self {
        Self {
            composer_id: req.composer_id,
            title: req.title,
            performer: req.performer,
            duration: req.duration,
            year: req.year,
        }
    }
}

impl From<UpdateRecordingRequest> for contract::RecordingPatch {
    fn from(req: UpdateRecordingRequest) -> Self {
        Self {
            title: req.title,
            performer: req.performer,
            duration: req.duration,
            year: req.year,
        }
    }
}
