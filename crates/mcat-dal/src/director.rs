use crate::reference::reference_repository;

reference_repository!(Director, "director");
