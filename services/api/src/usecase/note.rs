use uuid::Uuid;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{Note, Survey, User};
use crate::error::ApiError;
use crate::usecase::{ModelManager, expect};

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    pub async fn create_note(
        &self,
        user: &User,
        survey: &Survey,
        text: String,
    ) -> Result<Note, ApiError> {
        let survey = self.find_survey(survey.id).await?;
        self.assert_survey_member(user, &survey).await?;

        let note = Note {
            id: Uuid::now_v7(),
            text,
            survey_id: survey.id,
        };
        self.repo.insert_note(&note).await?;
        tracing::info!(note_id = %note.id, survey_id = %note.survey_id, "note created");
        Ok(note)
    }

    pub async fn find_note(&self, id: Uuid) -> Result<Note, ApiError> {
        expect(self.repo.find_note(id).await?, ApiError::NoteNotFound)
    }

    pub async fn list_notes_for_survey(&self, survey: &Survey) -> Result<Vec<Note>, ApiError> {
        self.repo.list_notes_by_survey(survey.id).await
    }

    pub async fn update_note(&self, id: Uuid, new_text: Option<String>) -> Result<Note, ApiError> {
        let mut note = self.find_note(id).await?;
        if let Some(text) = new_text {
            note.text = text;
        }
        self.repo.update_note(&note).await?;
        tracing::info!(note_id = %note.id, "note updated");
        Ok(note)
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<(), ApiError> {
        let note = self.find_note(id).await?;
        if !self.repo.delete_note(note.id).await? {
            return Err(ApiError::NoteNotFound);
        }
        tracing::info!(note_id = %note.id, "note deleted");
        Ok(())
    }
}
