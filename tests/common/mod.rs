//! Recording fake surfaces shared by the integration suites.
//!
//! Each fake mirrors a real surface's observable contract: it tracks its own
//! hidden flag and records every command the mediator issues. Probes are
//! shared `Rc<RefCell<…>>` handles so tests keep access to the state after
//! handing the fakes to the mediator.

use std::cell::RefCell;
use std::rc::Rc;

use sheetstack::{
    CategoriesSheet, Category, FallbackPolicy, MediatorConfig, NavigationEventsListener,
    PlaceSheet, SearchPlace, SearchSheet, SearchSheetsMediator,
};

#[derive(Debug, Default)]
pub struct SearchProbe {
    pub hidden: bool,
    pub opens: u32,
    pub restores: u32,
    pub consumes_back: bool,
    pub back_offers: u32,
}

pub struct FakeSearchSheet {
    pub probe: Rc<RefCell<SearchProbe>>,
}

impl SearchSheet for FakeSearchSheet {
    fn open(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.hidden = false;
        probe.opens += 1;
    }

    fn hide(&mut self) {
        self.probe.borrow_mut().hidden = true;
    }

    fn is_hidden(&self) -> bool {
        self.probe.borrow().hidden
    }

    fn restore_previous_non_hidden_state(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.hidden = false;
        probe.restores += 1;
    }

    fn handle_back_pressed(&mut self) -> bool {
        let mut probe = self.probe.borrow_mut();
        probe.back_offers += 1;
        probe.consumes_back
    }
}

#[derive(Debug, Default)]
pub struct CategoriesProbe {
    pub hidden: bool,
    /// Categories passed through the fresh-open flow (triggers loading).
    pub opened: Vec<Category>,
    /// Categories passed through the from-back-stack restore flow.
    pub restored: Vec<Category>,
    /// True while a fresh open's loading is in flight.
    pub loading: bool,
    pub cancels: u32,
}

pub struct FakeCategoriesSheet {
    pub probe: Rc<RefCell<CategoriesProbe>>,
}

impl CategoriesSheet for FakeCategoriesSheet {
    fn open(&mut self, category: &Category) {
        let mut probe = self.probe.borrow_mut();
        probe.hidden = false;
        probe.loading = true;
        probe.opened.push(category.clone());
    }

    fn hide(&mut self) {
        self.probe.borrow_mut().hidden = true;
    }

    fn is_hidden(&self) -> bool {
        self.probe.borrow().hidden
    }

    fn restore_previous_non_hidden_state(&mut self, category: &Category) {
        let mut probe = self.probe.borrow_mut();
        probe.hidden = false;
        probe.restored.push(category.clone());
    }

    fn cancel_category_loading(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.loading = false;
        probe.cancels += 1;
    }

    fn handle_back_pressed(&mut self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
pub struct PlaceProbe {
    pub hidden: bool,
    pub opened: Vec<SearchPlace>,
    pub restored: Vec<SearchPlace>,
}

pub struct FakePlaceSheet {
    pub probe: Rc<RefCell<PlaceProbe>>,
}

impl PlaceSheet for FakePlaceSheet {
    fn open(&mut self, place: &SearchPlace) {
        let mut probe = self.probe.borrow_mut();
        probe.hidden = false;
        probe.opened.push(place.clone());
    }

    fn hide(&mut self) {
        self.probe.borrow_mut().hidden = true;
    }

    fn is_hidden(&self) -> bool {
        self.probe.borrow().hidden
    }

    fn restore_previous_non_hidden_state(&mut self, place: &SearchPlace) {
        let mut probe = self.probe.borrow_mut();
        probe.hidden = false;
        probe.restored.push(place.clone());
    }
}

pub type TestMediator = SearchSheetsMediator<FakeSearchSheet, FakeCategoriesSheet, FakePlaceSheet>;

/// A mediator wired to fakes plus the probes observing them.
///
/// Sub-sheets start hidden and the search surface starts visible, matching a
/// freshly created screen.
pub struct Harness {
    pub mediator: TestMediator,
    pub search: Rc<RefCell<SearchProbe>>,
    pub categories: Rc<RefCell<CategoriesProbe>>,
    pub place: Rc<RefCell<PlaceProbe>>,
}

impl Harness {
    pub fn new(policy: FallbackPolicy) -> Self {
        let search = Rc::new(RefCell::new(SearchProbe::default()));
        let categories = Rc::new(RefCell::new(CategoriesProbe {
            hidden: true,
            ..CategoriesProbe::default()
        }));
        let place = Rc::new(RefCell::new(PlaceProbe {
            hidden: true,
            ..PlaceProbe::default()
        }));

        let mediator = SearchSheetsMediator::new(
            FakeSearchSheet {
                probe: search.clone(),
            },
            FakeCategoriesSheet {
                probe: categories.clone(),
            },
            FakePlaceSheet {
                probe: place.clone(),
            },
            MediatorConfig::with_fallback(policy),
        );

        Self {
            mediator,
            search,
            categories,
            place,
        }
    }

    /// At most one non-root surface visible; never both.
    pub fn assert_single_sub_sheet_visible(&self) {
        let categories_visible = !self.categories.borrow().hidden;
        let place_visible = !self.place.borrow().hidden;
        assert!(
            !(categories_visible && place_visible),
            "categories and place surfaces are visible simultaneously"
        );
    }
}

/// Listener counting each notification, for exactly-once assertions.
#[derive(Debug, Default)]
pub struct CountingListener {
    pub opened_categories: RefCell<Vec<Category>>,
    pub opened_places: RefCell<Vec<SearchPlace>>,
    pub back_to_main: std::cell::Cell<u32>,
}

impl NavigationEventsListener for CountingListener {
    fn on_open_categories_bottom_sheet(&self, category: &Category) {
        self.opened_categories.borrow_mut().push(category.clone());
    }

    fn on_open_place_bottom_sheet(&self, place: &SearchPlace) {
        self.opened_places.borrow_mut().push(place.clone());
    }

    fn on_back_to_main_bottom_sheet(&self) {
        self.back_to_main.set(self.back_to_main.get() + 1);
    }
}
