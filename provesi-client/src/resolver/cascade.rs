//! Warehouse to shelf cascade
//!
//! Selecting a warehouse clears the shelf selection and fetches the shelf
//! list of the new warehouse. Clearing the warehouse empties the shelf list
//! without a remote call. The item creation form and the item filter panel
//! each own one independent [`ShelfCascade`].

use shared::models::Shelf;
use shared::{AppError, ErrorCode};

use super::filter::present;
use crate::location::LocationDirectory;
use crate::sequence::{Outcome, RequestSequencer, Ticket};
use crate::{ClientError, ClientResult};

/// What the shelf list should become after a warehouse selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfListPlan {
    /// Empty the list, no fetch
    Clear,
    /// Fetch the shelves of this warehouse
    Fetch { warehouse_id: String },
}

/// Pure cascade rule
pub fn next_shelf_list(warehouse_id: Option<&str>) -> ShelfListPlan {
    match warehouse_id.map(str::trim) {
        Some(id) if !id.is_empty() => ShelfListPlan::Fetch {
            warehouse_id: id.to_string(),
        },
        _ => ShelfListPlan::Clear,
    }
}

/// Pending shelf-list fetch issued by a cascade
#[derive(Debug, Clone)]
pub struct ShelfRequest {
    pub warehouse_id: String,
    ticket: Ticket,
}

impl ShelfRequest {
    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    /// Fetch through the directory, abandoning the call once superseded
    pub async fn fetch(&self, directory: &LocationDirectory) -> ClientResult<Vec<Shelf>> {
        self.ticket
            .run(directory.list_shelves_for(&self.warehouse_id))
            .await
    }
}

/// Selection state of one cascade instance
#[derive(Debug, Default)]
pub struct ShelfCascade {
    warehouse_id: Option<String>,
    shelf_id: Option<String>,
    shelves: Vec<Shelf>,
    sequencer: RequestSequencer,
}

impl ShelfCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warehouse_id(&self) -> Option<&str> {
        self.warehouse_id.as_deref()
    }

    pub fn shelf_id(&self) -> Option<&str> {
        self.shelf_id.as_deref()
    }

    /// Shelves selectable under the current warehouse
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn selected_shelf(&self) -> Option<&Shelf> {
        let id = self.shelf_id.as_deref()?;
        self.shelves.iter().find(|s| s.id == id)
    }

    /// Apply a warehouse selection.
    ///
    /// Always clears the shelf selection. Returns the fetch to perform, or
    /// `None` when the warehouse was cleared.
    pub fn select_warehouse(&mut self, warehouse_id: Option<String>) -> Option<ShelfRequest> {
        self.shelf_id = None;
        match next_shelf_list(warehouse_id.as_deref()) {
            ShelfListPlan::Clear => {
                self.warehouse_id = None;
                self.shelves.clear();
                // a fetch still in flight must not repopulate the list
                self.sequencer.invalidate();
                None
            }
            ShelfListPlan::Fetch { warehouse_id } => {
                self.warehouse_id = Some(warehouse_id.clone());
                Some(ShelfRequest {
                    warehouse_id,
                    ticket: self.sequencer.issue(),
                })
            }
        }
    }

    /// Write a shelf-list response back.
    ///
    /// On failure the list is emptied: the previous list belongs to another
    /// warehouse and must not stay selectable.
    pub fn apply_shelves(
        &mut self,
        request: &ShelfRequest,
        result: ClientResult<Vec<Shelf>>,
    ) -> ClientResult<Outcome> {
        if !self.sequencer.settle(&request.ticket) {
            return Ok(Outcome::Discarded);
        }
        match result {
            Ok(shelves) => {
                self.shelves = shelves;
                Ok(Outcome::Applied)
            }
            Err(ClientError::Superseded) => Ok(Outcome::Discarded),
            Err(e) => {
                self.shelves.clear();
                Err(e)
            }
        }
    }

    /// Select and fetch in one step
    pub async fn change_warehouse(
        &mut self,
        directory: &LocationDirectory,
        warehouse_id: Option<String>,
    ) -> ClientResult<Outcome> {
        let Some(request) = self.select_warehouse(warehouse_id) else {
            return Ok(Outcome::Applied);
        };
        let result = request.fetch(directory).await;
        self.apply_shelves(&request, result)
    }

    /// Select a shelf from the current list, or clear the selection
    pub fn select_shelf(&mut self, shelf_id: Option<String>) -> ClientResult<()> {
        let Some(shelf_id) = present(shelf_id) else {
            self.shelf_id = None;
            return Ok(());
        };
        let Some(warehouse_id) = self.warehouse_id.as_deref() else {
            return Err(AppError::with_message(
                ErrorCode::ShelfNotInWarehouse,
                "select a warehouse before a shelf",
            )
            .into());
        };
        if !self.shelves.iter().any(|s| s.id == shelf_id) {
            return Err(AppError::with_message(
                ErrorCode::ShelfNotInWarehouse,
                format!("shelf {shelf_id} is not in warehouse {warehouse_id}"),
            )
            .with_detail("estanteria_id", shelf_id)
            .into());
        }
        self.shelf_id = Some(shelf_id);
        Ok(())
    }

    /// Back to nothing selected, cancelling any pending fetch
    pub fn reset(&mut self) {
        self.warehouse_id = None;
        self.shelf_id = None;
        self.shelves.clear();
        self.sequencer.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_shelf_list() {
        assert_eq!(next_shelf_list(None), ShelfListPlan::Clear);
        assert_eq!(next_shelf_list(Some("")), ShelfListPlan::Clear);
        assert_eq!(
            next_shelf_list(Some("BOG-1")),
            ShelfListPlan::Fetch {
                warehouse_id: "BOG-1".into()
            }
        );
    }

    #[test]
    fn test_select_warehouse_clears_shelf() {
        let mut cascade = ShelfCascade::new();
        let req = cascade.select_warehouse(Some("BOG-1".into())).unwrap();
        cascade
            .apply_shelves(&req, Ok(vec![Shelf::new("A-01", "Norte", 100)]))
            .unwrap();
        cascade.select_shelf(Some("A-01".into())).unwrap();
        assert_eq!(cascade.shelf_id(), Some("A-01"));

        let req = cascade.select_warehouse(Some("MED-2".into())).unwrap();
        assert_eq!(req.warehouse_id, "MED-2");
        assert_eq!(cascade.shelf_id(), None);

        assert!(cascade.select_warehouse(None).is_none());
        assert!(cascade.shelves().is_empty());
        assert_eq!(cascade.warehouse_id(), None);
    }

    #[test]
    fn test_stale_shelf_list_discarded() {
        let mut cascade = ShelfCascade::new();
        let first = cascade.select_warehouse(Some("B1".into())).unwrap();
        let second = cascade.select_warehouse(Some("B2".into())).unwrap();

        let fresh = vec![Shelf::new("B2-01", "Sur", 10)];
        assert_eq!(
            cascade.apply_shelves(&second, Ok(fresh.clone())).unwrap(),
            Outcome::Applied
        );
        // the earlier request lands last
        let late = cascade
            .apply_shelves(&first, Ok(vec![Shelf::new("B1-01", "Norte", 10)]))
            .unwrap();
        assert_eq!(late, Outcome::Discarded);
        assert_eq!(cascade.shelves(), fresh.as_slice());
    }

    #[test]
    fn test_clear_discards_in_flight_fetch() {
        let mut cascade = ShelfCascade::new();
        let req = cascade.select_warehouse(Some("B1".into())).unwrap();
        cascade.select_warehouse(None);
        let outcome = cascade
            .apply_shelves(&req, Ok(vec![Shelf::new("A-01", "Norte", 10)]))
            .unwrap();
        assert_eq!(outcome, Outcome::Discarded);
        assert!(cascade.shelves().is_empty());
    }

    #[test]
    fn test_failed_fetch_empties_list() {
        let mut cascade = ShelfCascade::new();
        let req = cascade.select_warehouse(Some("B1".into())).unwrap();
        cascade
            .apply_shelves(&req, Ok(vec![Shelf::new("A-01", "Norte", 10)]))
            .unwrap();

        let req = cascade.select_warehouse(Some("B2".into())).unwrap();
        let result = cascade.apply_shelves(&req, Err(ClientError::NotFound("B2".into())));
        assert!(result.is_err());
        assert!(cascade.shelves().is_empty());
    }

    #[test]
    fn test_select_shelf_must_belong_to_warehouse() {
        let mut cascade = ShelfCascade::new();
        let err = cascade.select_shelf(Some("A-01".into())).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ShelfNotInWarehouse);

        let req = cascade.select_warehouse(Some("B1".into())).unwrap();
        cascade
            .apply_shelves(&req, Ok(vec![Shelf::new("A-01", "Norte", 10)]))
            .unwrap();
        assert!(cascade.select_shelf(Some("Z-99".into())).is_err());
        assert!(cascade.select_shelf(Some("A-01".into())).is_ok());
        assert!(cascade.select_shelf(None).is_ok());
        assert_eq!(cascade.shelf_id(), None);
    }
}
